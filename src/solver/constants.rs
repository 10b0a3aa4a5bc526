// Default bounds policy for accepted board sizes. The upper bound caps
// output volume, not the algorithm: the 14-queen puzzle alone produces
// 365,596 solutions and several hundred megabytes of rendered boards.
pub const DEFAULT_MIN_SIZE: usize = 4;
pub const DEFAULT_MAX_SIZE: usize = 14;
