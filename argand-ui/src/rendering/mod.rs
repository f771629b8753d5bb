pub mod frame_loop;

pub use frame_loop::FrameLoop;
