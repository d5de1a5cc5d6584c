// Configuration constants for the solver module
pub const NUMBER_COUNT: usize = 6;
pub const DEFAULT_TOP: usize = 20;
