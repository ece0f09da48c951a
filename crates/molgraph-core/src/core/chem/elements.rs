use phf::{Map, Set, phf_map, phf_set};

/// All two-letter element symbols, uppercase.
///
/// Used to disambiguate 1- vs 2-letter symbols when an atom-name field has
/// to stand in for a missing element field.
static TWO_LETTER_SYMBOLS: Set<&'static str> = phf_set! {
    "HE", "LI", "BE", "NE", "NA", "MG", "AL", "SI", "CL", "AR", "CA", "SC",
    "TI", "CR", "MN", "FE", "CO", "NI", "CU", "ZN", "GA", "GE", "AS", "SE",
    "BR", "KR", "RB", "SR", "ZR", "NB", "MO", "TC", "RU", "RH", "PD", "AG",
    "CD", "IN", "SN", "SB", "TE", "XE", "CS", "BA", "LA", "CE", "PR", "ND",
    "PM", "SM", "EU", "GD", "TB", "DY", "HO", "ER", "TM", "YB", "LU", "HF",
    "TA", "RE", "OS", "IR", "PT", "AU", "HG", "TL", "PB", "BI", "PO", "AT",
    "RN", "FR", "RA", "AC", "TH", "PA", "NP", "PU", "AM", "CM", "BK", "CF",
    "ES", "FM", "MD", "NO", "LR",
};

/// Single-bond covalent radii in Angstroms, keyed by canonical symbol.
static COVALENT_RADII: Map<&'static str, f64> = phf_map! {
    "H" => 0.31,
    "C" => 0.76,
    "N" => 0.71,
    "O" => 0.66,
    "F" => 0.57,
    "P" => 1.07,
    "S" => 1.05,
    "Cl" => 1.02,
    "Br" => 1.2,
    "I" => 1.39,
    "B" => 0.84,
    "Si" => 1.11,
    "Li" => 1.28,
    "Na" => 1.66,
    "K" => 2.03,
    "Mg" => 1.41,
    "Ca" => 1.76,
    "Fe" => 1.32,
    "Zn" => 1.22,
    "Cu" => 1.32,
    "Ti" => 1.6,
    "Al" => 1.21,
    "Ba" => 2.15,
    "Y" => 1.9,
};

/// CPK (Corey-Pauling-Koltun) display colors as 0xRRGGBB.
static CPK_COLORS: Map<&'static str, u32> = phf_map! {
    "H" => 0xFFFFFF,
    "C" => 0x000000,
    "N" => 0x3050F8,
    "O" => 0xFF0D0D,
    "F" => 0x90E050,
    "Cl" => 0x1FF01F,
    "Br" => 0xA62929,
    "I" => 0x940094,
    "He" => 0xD9FFFF,
    "Ne" => 0xB3E3F5,
    "Ar" => 0x80D1E3,
    "Xe" => 0x429EB0,
    "Kr" => 0x5CB8B8,
    "P" => 0xFF8000,
    "S" => 0xFFFF30,
    "B" => 0xFFB5B5,
    "Li" => 0xCC80FF,
    "Na" => 0xAB5CF2,
    "K" => 0x8F40D4,
    "Rb" => 0x702EB0,
    "Cs" => 0x57178F,
    "Be" => 0xC2FF00,
    "Mg" => 0x8AFF00,
    "Ca" => 0x3DFF00,
    "Ti" => 0xBFC2C7,
    "Fe" => 0xE06633,
    "Zn" => 0x7D80B0,
    "Cu" => 0xC88033,
    "Ni" => 0x50D050,
    "Co" => 0xF090A0,
    "Mn" => 0x9C7AC7,
    "Al" => 0xBFA6A6,
    "Si" => 0xF0C8A0,
    "Se" => 0xFFA100,
    "Y" => 0x94FFFF,
    "Ba" => 0x00C900,
};

/// Radius assumed for elements absent from the covalent table.
pub const DEFAULT_COVALENT_RADIUS: f64 = 1.0;

/// Neutral grey used for elements without a CPK entry.
pub const DEFAULT_CPK_COLOR: u32 = 0x909090;

/// Looks up the single-bond covalent radius for a canonical element symbol.
pub fn covalent_radius(element: &str) -> f64 {
    COVALENT_RADII
        .get(element)
        .copied()
        .unwrap_or(DEFAULT_COVALENT_RADIUS)
}

/// Looks up the CPK display color for a canonical element symbol.
pub fn cpk_color(element: &str) -> u32 {
    CPK_COLORS.get(element).copied().unwrap_or(DEFAULT_CPK_COLOR)
}

/// Whether the first two characters of `symbol` (already uppercased) name a
/// two-letter element.
pub fn is_two_letter_symbol(symbol: &str) -> bool {
    TWO_LETTER_SYMBOLS.contains(symbol)
}

/// Canonicalizes an element symbol to TitleCase: first letter upper, second
/// lower. Characters beyond the second are dropped (the element field is two
/// columns wide).
pub fn canonical_symbol(symbol: &str) -> String {
    let mut chars = symbol.chars();
    let mut canonical = String::with_capacity(2);
    if let Some(first) = chars.next() {
        canonical.push(first.to_ascii_uppercase());
    }
    if let Some(second) = chars.next() {
        canonical.push(second.to_ascii_lowercase());
    }
    canonical
}
