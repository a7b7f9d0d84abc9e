// Wire types for `proto/products.proto`.

/// Fully qualified gRPC service name, used for health reporting.
pub const SERVICE_NAME: &str = "products.ProductsService";

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddProductRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(string, tag = "3")]
    pub category: String,
    #[prost(string, tag = "4")]
    pub brand: String,
    #[prost(double, tag = "5")]
    pub price: f64,
    #[prost(string, tag = "6")]
    pub image_url: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetProductRequest {
    #[prost(string, tag = "1")]
    pub sku: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Product {
    #[prost(string, tag = "1")]
    pub sku: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub category: String,
    #[prost(string, tag = "5")]
    pub brand: String,
    #[prost(double, tag = "6")]
    pub price: f64,
    #[prost(string, tag = "7")]
    pub image_url: String,
    #[prost(string, tag = "8")]
    pub merchant_id: String,
}

include!(concat!(env!("OUT_DIR"), "/products.ProductsService.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_product_decodes_from_tagged_fields() {
        // field 1 (sku) = "abc", field 6 (price) = 12.5
        let mut bytes = vec![0x0a, 0x03, b'a', b'b', b'c', 0x31];
        bytes.extend_from_slice(&12.5f64.to_le_bytes());

        let product = Product::decode(bytes.as_slice()).unwrap();
        assert_eq!(product.sku, "abc");
        assert_eq!(product.price, 12.5);
        assert!(product.merchant_id.is_empty());
    }

    #[test]
    fn test_empty_request_encodes_to_nothing() {
        let request = GetProductRequest::default();
        assert!(request.encode_to_vec().is_empty());
    }
}
