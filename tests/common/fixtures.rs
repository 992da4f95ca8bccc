//! Reusable test content

/// Docker config with basic auth `alice:s3cret` for registry.example
pub const DOCKER_CONFIG_ALICE: &str = r#"{
  "auths": {
    "registry.example": { "auth": "YWxpY2U6czNjcmV0" }
  }
}
"#;

/// Docker config delegating registry.example to a helper
pub const DOCKER_CONFIG_HELPER: &str = r#"{
  "credHelpers": { "registry.example": "ecr-login" }
}
"#;

pub const DIGEST: &str = "sha256:deadbeef";

/// Text output of a successful push with the built-in rules
pub const EXPECTED_TEXT_OUTPUT: &str = "Adding attributes image=true to file pattern *.jpg\n\
Adding attributes metadata=true to file pattern *.json\n\
sha256:deadbeef\n";
