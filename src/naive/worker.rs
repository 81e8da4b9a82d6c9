use crate::utils::error::{KataError, Result};

/// One bundled trait: every implementor must answer for both operations,
/// whether it can support them or not.
pub trait Worker {
    fn work(&self) -> &'static str;
    fn eat(&self) -> Result<&'static str>;
}

pub struct HumanWorker;

impl Worker for HumanWorker {
    fn work(&self) -> &'static str {
        "Working..."
    }

    fn eat(&self) -> Result<&'static str> {
        Ok("Eating lunch...")
    }
}

pub struct RobotWorker;

impl Worker for RobotWorker {
    fn work(&self) -> &'static str {
        "Working..."
    }

    // The only honest answer available under this interface: fail at runtime.
    fn eat(&self) -> Result<&'static str> {
        Err(KataError::UnsupportedCapabilityError {
            worker: "RobotWorker",
            capability: "eat",
        })
    }
}
