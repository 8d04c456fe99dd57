//! Internal macros for preset generation.
//!
//! Every named preset is the same three pieces: an uninhabited marker type
//! implementing [`Algorithm`](crate::Algorithm), a [`StaticCrc`](crate::StaticCrc)
//! alias over it, and matching docs. The macro writes all three from one line
//! per preset.

/// Generate preset marker types and their `StaticCrc` aliases.
///
/// Markers land in a `catalog` module so that the alias can reuse the preset
/// name at the invocation site.
///
/// # Arguments
///
/// - `$name`: type name shared by the marker and the alias (e.g. `Crc16Xmodem`)
/// - `$reg`: narrowest unsigned integer holding the width
/// - `$params`: a [`CrcParams`](crate::CrcParams) constant
/// - `$label`: catalogue name (e.g. `"CRC-16/XMODEM"`)
macro_rules! define_algorithms {
  (
    $(
      $(#[$outer:meta])*
      $name:ident: $reg:ty = $params:expr, $label:literal;
    )*
  ) => {
    /// Marker types naming each preset algorithm.
    ///
    /// Use these with [`StaticCrc`](crate::StaticCrc) directly, or through
    /// the aliases of the same name at the crate root.
    pub mod catalog {
      use $crate::params::CrcParams;

      $(
        $(#[$outer])*
        #[derive(Debug, Clone, Copy)]
        pub enum $name {}

        impl $crate::fixed::Algorithm for $name {
          type Register = $reg;
          const PARAMS: CrcParams = $params;
          const NAME: &'static str = $label;
        }
      )*

      /// Every preset, as `(name, parameters)`.
      pub const ALL: &[(&str, CrcParams)] = &[$(($label, $params)),*];
    }

    $(
      $(#[$outer])*
      pub type $name = $crate::fixed::StaticCrc<catalog::$name>;
    )*
  };
}
