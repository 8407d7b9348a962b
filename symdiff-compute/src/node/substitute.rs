use crate::scalar::Scalar;
use super::Node;

impl<T: Scalar> Node<T> {
    /// Returns a new tree where every occurrence of the variable `var` is replaced by the
    /// constant `value`. Other variables and constants are copied unchanged.
    pub fn substitute(&self, var: &str, value: T) -> Node<T> {
        match self {
            Self::Var(name) if name == var => Node::constant(value),
            _ => self.map_children(|child| child.substitute(var, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ctxt::Ctxt;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn replaces_matching_variables() {
        // (x + 4)
        let node = Node::add(Node::var("x"), Node::constant(4.0));
        let substituted = node.substitute("x", 3.0);
        assert_eq!(substituted.to_string(), "(3 + 4)");
        assert_eq!(substituted.evaluate(&Ctxt::new()).unwrap(), 7.0);
    }

    #[test]
    fn leaves_other_variables() {
        let node = Node::mul(Node::var("x"), Node::sin(Node::var("y")));
        let substituted = node.substitute("x", 2.0);
        assert_eq!(substituted, Node::mul(Node::constant(2.0), Node::sin(Node::var("y"))));
    }

    #[test]
    fn constants_pass_through() {
        let node = Node::constant(2.5);
        assert_eq!(node.substitute("x", 10.0), Node::constant(2.5));
    }

    #[test]
    fn every_occurrence() {
        // x ^ 4 with x = 2
        let node = Node::pow(Node::var("x"), Node::constant(4.0));
        assert_eq!(node.substitute("x", 2.0).evaluate(&Ctxt::new()).unwrap(), 16.0);

        let node = Node::sub(Node::var("x"), Node::neg(Node::var("x")));
        assert!(node.substitute("x", 1.0).variables().is_empty());
    }
}
