// generate_secret.rs
// Utility to generate fresh token-signing secrets for the system

use rand::RngCore;

fn random_hex(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    rand::thread_rng().fill_bytes(&mut buf);
    hex::encode(buf)
}

fn main() {
    println!("Generating new token-signing secrets...\n");

    let access_secret = random_hex(64);
    let refresh_secret = random_hex(64);

    println!("✅ Secrets generated successfully!\n");
    println!("Add these to your .env file:");
    println!("─────────────────────────────────────────────────");
    println!("ACCESS_TOKEN_SECRET={}", access_secret);
    println!("REFRESH_TOKEN_SECRET={}", refresh_secret);
    println!("─────────────────────────────────────────────────");
    println!("\n⚠️  IMPORTANT:");
    println!("  • Keep these secrets secure and never commit them to version control");
    println!("  • Rotating the access secret signs out every active session");
    println!("  • Rotating the refresh secret invalidates every outstanding refresh token");
}
