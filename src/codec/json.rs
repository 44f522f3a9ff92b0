use super::Codec;
use crate::error::CodecError;
use crate::product::Product;

pub struct JsonCodec;

impl Codec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode(&self, products: &[Product]) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec_pretty(products)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Product>, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
