//! Downlink telemetry packet decoding.
//!
//! The parser decodes the fixed 14-byte record emitted by the flight
//! computer into a domain-friendly structure. All fields are big-endian and
//! live at fixed offsets; any other buffer length is rejected before field
//! extraction. Byte positions are defined in `layout`, while bounds-checked
//! reads live in `reader`.
//!
//! Version française (résumé):
//! Le module décode l'enregistrement fixe de 14 octets du lien descendant
//! (grand-boutiste, offsets fixes). Les positions sont dans `layout`, les
//! lectures vérifiées dans `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::decode_telem_packet;
