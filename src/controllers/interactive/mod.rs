//! Latest-wins frame scheduling for interactive viewing.
//!
//! Requests go in as [`RenderRequest`] snapshots; finished frames and frame
//! errors come out through an [`InteractiveControllerPresenterPort`]. A newer
//! request cancels the frame in flight, which is then dropped silently.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use errors::render_error::RenderError;
pub use events::render_event::RenderEvent;
pub use ports::presenter_port::InteractiveControllerPresenterPort;
