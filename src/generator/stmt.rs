use crate::ast::statements::DefNode;

use super::generator::Generate;

/// `def name(a,b): return body`
impl Generate for DefNode {
    fn generate_into(&self, out: &mut String) {
        out.push_str("def ");
        out.push_str(&self.name);
        out.push('(');
        out.push_str(&self.parameters.join(","));
        out.push_str("): return ");
        self.body.generate_into(out);
    }
}
