use super::Codec;
use crate::error::CodecError;
use crate::product::Product;

pub struct YamlCodec;

impl Codec for YamlCodec {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn encode(&self, products: &[Product]) -> Result<Vec<u8>, CodecError> {
        Ok(serde_yaml::to_string(products)?.into_bytes())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Product>, CodecError> {
        Ok(serde_yaml::from_slice(bytes)?)
    }
}
