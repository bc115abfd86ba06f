pub const DESCRIPTION: &str = "Mock Price Source";

pub const VERSION: u32 = 1;
