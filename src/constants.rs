/// Page hooks the dot layer binds to.
///
/// The stylesheet owns the look of the dots; these names are the contract
/// between it, the markup and this crate.
// Element ids
pub const DOT_CONTAINER_ID: &str = "dot-container";
pub const START_ANCHOR_ID: &str = "about"; // top of the vertical band
pub const END_ANCHOR_ID: &str = "contact"; // bottom edge ends the band

// Classes applied to every dot element (size class is added per dot)
pub const DOT_CLASS: &str = "dot";
