pub mod frame;

pub use frame::{FrameTag, OutboundFrame, TAG_LEN};
