fn main() -> Result<(), Box<dyn std::error::Error>> {
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .type_attribute(".user", "#[derive(serde::Serialize)]")
        .compile(&["proto/user.proto"], &["proto"])?;

    Ok(())
}
