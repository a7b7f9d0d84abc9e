//! Generates tonic client/server stubs for the protobuf contracts in `proto/`.
//!
//! Message types are declared with `prost::Message` derives in `src/`, so only the
//! service plumbing is generated here and no `protoc` binary is required.

fn unary(name: &str, route: &str, input: &str, output: &str) -> tonic_build::manual::Method {
    tonic_build::manual::Method::builder()
        .name(name)
        .route_name(route)
        .input_type(input)
        .output_type(output)
        .codec_path("tonic::codec::ProstCodec")
        .build()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=proto/products.proto");
    println!("cargo:rerun-if-changed=proto/users.proto");

    let products = tonic_build::manual::Service::builder()
        .name("ProductsService")
        .package("products")
        .method(unary(
            "add_product",
            "AddProduct",
            "crate::products::AddProductRequest",
            "crate::products::Product",
        ))
        .method(unary(
            "get_product",
            "GetProduct",
            "crate::products::GetProductRequest",
            "crate::products::Product",
        ))
        .build();

    let users = tonic_build::manual::Service::builder()
        .name("UsersService")
        .package("users")
        .method(unary(
            "get_user_from_jwt",
            "GetUserFromJwt",
            "crate::users::GetUserFromJwtRequest",
            "crate::users::GetUserFromJwtResponse",
        ))
        .build();

    tonic_build::manual::Builder::new().compile(&[products, users]);
}
