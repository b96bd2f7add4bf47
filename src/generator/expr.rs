use crate::ast::expressions::{CallNode, Expr, IntegerNode, VarRef};

use super::generator::{generate_comma_separated, Generate};

impl Generate for IntegerNode {
    fn generate_into(&self, out: &mut String) {
        out.push_str(&self.value);
    }
}

impl Generate for VarRef {
    fn generate_into(&self, out: &mut String) {
        out.push_str(&self.name);
    }
}

impl Generate for CallNode {
    fn generate_into(&self, out: &mut String) {
        out.push_str(&self.name);
        out.push('(');
        generate_comma_separated(&self.arguments, out);
        out.push(')');
    }
}

impl Generate for Expr {
    fn generate_into(&self, out: &mut String) {
        match self {
            Expr::Integer(node) => node.generate_into(out),
            Expr::VarRef(node) => node.generate_into(out),
            Expr::Call(node) => node.generate_into(out),
        }
    }
}
