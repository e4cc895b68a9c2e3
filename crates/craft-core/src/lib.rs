pub mod catalog;
pub mod constants;
pub mod flow;
pub mod forms;
pub mod math;
pub mod paint;
pub mod particles;
pub mod slider;
pub mod trail;

pub use catalog::*;
pub use constants::*;
pub use flow::*;
pub use forms::*;
pub use math::*;
pub use paint::*;
pub use particles::*;
pub use slider::*;
pub use trail::*;
