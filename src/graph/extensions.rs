use crate::graph::{amplify::Gain, mix::Sum, node::GraphNode, through::Through};

pub trait NodeExt: GraphNode + Sized {
    fn gain(self, gain: f32) -> Gain<Self> {
        Gain::new(self, gain)
    }

    fn through<F: GraphNode>(self, filter: F) -> Through<Self, F> {
        Through::new(self, filter)
    }

    fn sum<B: GraphNode>(self, source: B) -> Sum<Self, B> {
        Sum::new(self, source)
    }
}

impl<T: GraphNode> NodeExt for T {}
