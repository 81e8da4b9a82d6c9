// The "before" half of each pair: deliberately flawed versions kept faithful
// to the shape of the code they illustrate, latent defects included. The
// refactored counterparts live in `domain`, `adapters` and `core`; nothing
// in this module is wired into the showcase.

pub mod discount;
pub mod logger;
pub mod report;
pub mod shapes;
pub mod worker;
