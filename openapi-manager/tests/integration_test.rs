// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use std::path::Path;
use std::process::Command;

/// The client build reads the checked-in document, so regenerating it must
/// keep every endpoint the client relies on.
#[test]
fn test_connectwise_spec_generation() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().expect("Failed to get workspace root");

    let output = Command::new("cargo")
        .args(["run", "-p", "openapi-manager", "--", "generate"])
        .current_dir(workspace_root)
        .output()
        .expect("Failed to generate OpenAPI spec");

    assert!(
        output.status.success(),
        "OpenAPI generation failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let spec_path = workspace_root.join("openapi-specs/generated/connectwise-api.json");
    let spec_content = std::fs::read_to_string(&spec_path).expect("Failed to read spec file");

    for needle in [
        "\"openapi\":",
        "\"version\": \"2024.13.0\"",
        "\"/system/info\"",
        "\"/service/tickets/{id}\"",
        "\"/company/contacts/{id}\"",
        "\"/company/companies/{id}\"",
        "\"/finance/agreements/{id}\"",
        "\"/project/projects/{id}\"",
    ] {
        assert!(spec_content.contains(needle), "spec is missing {}", needle);
    }
}
