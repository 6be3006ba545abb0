/// Display color carried by the static tables, as 8-bit RGB channels.
///
/// The model itself is renderer-agnostic; consumers convert this into
/// whatever color type their toolkit uses.
pub type Rgb = [u8; 3];
