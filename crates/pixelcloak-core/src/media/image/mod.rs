pub mod embedder;
pub mod extractor;
pub mod walker;

pub use embedder::{capacity_bits, embed, embed_in_place};
pub use extractor::extract;
pub use walker::{ChannelAddress, ChannelIter, ChannelIterMut, ChannelWalk, CHANNELS};
