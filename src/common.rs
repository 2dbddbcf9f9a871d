// Default URLs
pub static DEFAULT_BASE_URL: &str = "https://api.razorpay.com";

// Header names
pub static DEVICE_MODE_HEADER: &str = "x-razorpay-device-mode";
