/// Display a banner with the service name and version
pub fn print_banner() {
    println!("{}", render_banner(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));
}

/// Display startup information
pub fn print_startup_info(address: &str) {
    println!("{}", render_startup_info(address));
}

fn render_banner(name: &str, version: &str) -> String {
    format!(
        r#"
╭────────────────────────────────────────────────────────╮
│  {:<52}  │
│  Version: {:<43}  │
│  Protocol: gRPC (user.UserService)                     │
╰────────────────────────────────────────────────────────╯
"#,
        title_case(name),
        version,
    )
}

fn render_startup_info(address: &str) -> String {
    format!(
        r#"
📋 Configuration Loaded
  🌐 gRPC server is running on {}
  📦 Ready to accept connections
"#,
        address
    )
}

/// `user-service` -> `User Service`
fn title_case(s: &str) -> String {
    s.split(|c| c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
