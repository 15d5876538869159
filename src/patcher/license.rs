use regex::Regex;
use std::sync::LazyLock;

/// Canonical Apache-2.0 header inserted above generated-code markers.
pub const LICENSE_HEADER: &str = "/*
 * Copyright 2020 Google LLC
 *
 * Licensed under the Apache License, Version 2.0 (the \"License\");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     https://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an \"AS IS\" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */";

/// Marker comment emitted by protoc at the top of generated message classes.
pub static PROTO_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Generated by the protocol buffer compiler").unwrap()
});

/// Marker comment emitted by the gRPC codegen plugin.
pub static GRPC_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Generated by gRPC").unwrap());
