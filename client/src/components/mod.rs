pub mod pad;
pub mod preview;
pub mod upload;
