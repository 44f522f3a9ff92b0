mod json;
mod yaml;

pub use json::JsonCodec;
pub use yaml::YamlCodec;

use crate::error::CodecError;
use crate::product::Product;

/// Turns the whole catalog into one document and back.
pub trait Codec: Send + Sync {
    fn name(&self) -> &'static str;

    fn encode(&self, products: &[Product]) -> Result<Vec<u8>, CodecError>;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Product>, CodecError>;
}

pub fn create_codec(format: crate::config::Format) -> Box<dyn Codec> {
    match format {
        crate::config::Format::Json => Box::new(JsonCodec),
        crate::config::Format::Yaml => Box::new(YamlCodec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Format;
    use crate::product::ProductFields;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(
                1,
                ProductFields {
                    name: "Apple".to_string(),
                    price: 10.99,
                    description: "Fresh apple".to_string(),
                    quantity: 50,
                },
            ),
            Product::new(
                2,
                ProductFields {
                    name: "Banana".to_string(),
                    price: 5.99,
                    description: "Yellow banana".to_string(),
                    quantity: 100,
                },
            ),
        ]
    }

    #[test]
    fn create_codec_picks_by_format() {
        assert_eq!(create_codec(Format::Json).name(), "json");
        assert_eq!(create_codec(Format::Yaml).name(), "yaml");
    }

    #[test]
    fn both_codecs_preserve_order() {
        for format in [Format::Json, Format::Yaml] {
            let codec = create_codec(format);
            let bytes = codec.encode(&sample()).unwrap();
            assert_eq!(codec.decode(&bytes).unwrap(), sample(), "{}", codec.name());
        }
    }
}
