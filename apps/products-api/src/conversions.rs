//! Proto conversion helpers
//!
//! Wire messages use empty strings for absent values; the domain uses `Option`.

use domain_products::{NewProduct, Product};

pub fn new_product_from_proto(req: rpc::products::AddProductRequest) -> NewProduct {
    NewProduct {
        name: req.name,
        description: req.description,
        category: req.category,
        brand: req.brand,
        price: req.price,
        image_url: opt_string(req.image_url),
    }
}

pub fn product_to_proto(product: Product) -> rpc::products::Product {
    rpc::products::Product {
        sku: product.sku,
        name: product.name,
        description: product.description,
        category: product.category,
        brand: product.brand,
        price: product.price,
        image_url: product.image_url.unwrap_or_default(),
        merchant_id: product.merchant_id,
    }
}

fn opt_string(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_new_product_from_proto() {
        let candidate = new_product_from_proto(rpc::products::AddProductRequest {
            name: "Leather Shoe".into(),
            description: "Brown leather".into(),
            category: "shoes".into(),
            brand: "Clarks".into(),
            price: 12000.0,
            image_url: "https://img.example.com/shoe.png".into(),
        });

        assert_eq!(candidate.name, "Leather Shoe");
        assert_eq!(candidate.brand, "Clarks");
        assert_eq!(candidate.price, 12000.0);
        assert_eq!(
            candidate.image_url.as_deref(),
            Some("https://img.example.com/shoe.png")
        );
    }

    #[test]
    fn test_empty_image_url_is_absent() {
        let candidate = new_product_from_proto(rpc::products::AddProductRequest {
            name: "Pink Slippers".into(),
            category: "slippers".into(),
            brand: "Nike".into(),
            price: 100000.0,
            ..Default::default()
        });

        assert_eq!(candidate.image_url, None);
        assert_eq!(candidate.description, "");
    }

    #[test]
    fn test_mapping_is_repeatable() {
        let request = rpc::products::AddProductRequest {
            name: "White Canvas".into(),
            category: "Fashion".into(),
            price: 4500.0,
            ..Default::default()
        };

        assert_eq!(
            new_product_from_proto(request.clone()),
            new_product_from_proto(request)
        );
    }

    #[test]
    fn test_caller_fields_survive_round_trip() {
        let request = rpc::products::AddProductRequest {
            name: "White Canvas".into(),
            description: "Plain canvas sneakers".into(),
            category: "Fashion".into(),
            brand: "Vans".into(),
            price: 4500.0,
            image_url: "https://img.example.com/white.png".into(),
        };

        let stored = Product::for_merchant(new_product_from_proto(request.clone()), "valid.user");
        let proto = product_to_proto(stored);

        assert_eq!(proto.name, request.name);
        assert_eq!(proto.description, request.description);
        assert_eq!(proto.category, request.category);
        assert_eq!(proto.brand, request.brand);
        assert_eq!(proto.price, request.price);
        assert_eq!(proto.image_url, request.image_url);
        assert_eq!(proto.merchant_id, "valid.user");
        assert!(!proto.sku.is_empty());
    }

    #[test]
    fn test_empty_request_round_trips_to_zero_values() {
        let stored = Product::for_merchant(
            new_product_from_proto(rpc::products::AddProductRequest::default()),
            "valid.user",
        );
        let proto = product_to_proto(stored);

        assert_eq!(proto.name, "");
        assert_eq!(proto.description, "");
        assert_eq!(proto.category, "");
        assert_eq!(proto.brand, "");
        assert_eq!(proto.price, 0.0);
        assert_eq!(proto.image_url, "");
    }

    #[test]
    fn test_product_to_proto() {
        let proto = product_to_proto(Product {
            sku: "blue.canvas.123".into(),
            name: "Blue Canvas".into(),
            description: "Canvas sneakers".into(),
            category: "Fashion".into(),
            brand: "Addidas".into(),
            price: 9009999.0,
            image_url: None,
            merchant_id: "valid.user".into(),
            created_at: Utc::now(),
        });

        assert_eq!(proto.sku, "blue.canvas.123");
        assert_eq!(proto.category, "Fashion");
        assert_eq!(proto.brand, "Addidas");
        assert_eq!(proto.price, 9009999.0);
        assert_eq!(proto.image_url, "");
        assert_eq!(proto.merchant_id, "valid.user");
    }
}
