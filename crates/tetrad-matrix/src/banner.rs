//! License header prepended to every emitted file.

/// Render the MIT license banner for `package` held by `organization`.
///
/// `package` is the declaration's `name` (e.g. `ranger-core`), not its UMD
/// `display_name`.
///
/// The text is consumed verbatim downstream: no trailing newline, one space
/// after each leading `*`.
pub fn license_banner(package: &str, organization: &str) -> String {
    format!(
        "/**\n * {package}\n *\n * Copyright (c) {organization}\n *\n * This source code is licensed under the MIT license found in the\n * LICENSE.md file in the root directory of this source tree.\n *\n * @license MIT\n */"
    )
}
