mod client_config;
mod dispatch;
mod errors;
mod orders;
mod payments;
mod retries;
mod signature;
mod uploads;
