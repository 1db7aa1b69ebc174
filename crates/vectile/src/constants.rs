/// Number of low bits holding the opcode in a command word.
pub const CMD_BITS: u32 = 3;

/// Mask selecting the opcode bits of a command word.
pub const CMD_MASK: u32 = (1 << CMD_BITS) - 1;

/// Layer schema version written to every layer.
pub const LAYER_VERSION: u32 = 1;

/// Name of the layer holding line geometry.
pub const LINES_LAYER: &str = "lines";

/// Name of the layer holding marker polygons.
pub const POLYGONS_LAYER: &str = "polygons";
