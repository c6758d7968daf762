pub type NodeId = usize;
pub type EdgeId = usize;

/// Validated edge weight, also used for accumulated path weights.
///
/// Path weights saturate at `Weight::MAX`: a path whose true weight is larger
/// is reported as `Weight::MAX`. Any reported `Weight::MAX` is therefore a
/// lower bound, not an exact distance.
pub type Weight = u64;
