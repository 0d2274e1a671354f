// Services layer for business logic
// Services own defaults and row-to-DTO conversion, calling storage directly

pub mod event;

pub use event::EventService;
