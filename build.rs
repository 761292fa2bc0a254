// Payment settings are baked in at compile time: the browser has no process
// environment to read them from at runtime.
const FORWARDED_KEYS: [&str; 3] = ["STRIPE_PUBLISHABLE_KEY", "STRIPE_PRICE_ID", "GUIDE_PRICE_LABEL"];

fn main() {
    // A missing .env is fine, the keys may come from the real environment
    let _ = dotenv::dotenv();

    println!("cargo:rerun-if-changed=.env");
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
