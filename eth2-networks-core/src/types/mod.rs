/// The 4-byte tag identifying a protocol fork
pub type ForkVersion = [u8; 4];

mod network;
pub use network::{parse_network, Network};

mod slot;
pub use slot::{Epoch, Slot};

pub mod serde_helpers;
