//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# certsync configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Values set through the environment (or the dotenv file) win over this file.

[cert]
# public_cert = "test-certs/example.com.cert.pem"   # SSL_PUB_PATH
# private_key = "test-certs/example.com.key.pem"    # SSL_PRI_PATH

[cdn]
# endpoint = "cdn.aliyuncs.com"
# domain_name = "cdn.example.com"     # CERTSYNC_DOMAIN_NAME, required
# cert_name = "acme"
# cert_type = "upload"                # upload, cas
# ssl_protocol = "on"                 # on, off
# access_key_id = ""                  # ALIBABA_CLOUD_ACCESS_KEY_ID, required
# access_key_secret = ""              # ALIBABA_CLOUD_ACCESS_KEY_SECRET, required
# timeout_secs = 30                   # 1-300

[watch]
# debounce_ms = 1000                  # 0-600000
# sync_on_start = true

[logging]
# level = "info"                      # trace, debug, info, warn, error
# json = false
"##
    .to_string()
}
