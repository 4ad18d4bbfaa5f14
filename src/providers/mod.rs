pub mod microsoft;
pub(crate) mod microsoft_wire;
