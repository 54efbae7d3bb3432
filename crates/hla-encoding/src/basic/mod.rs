// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Basic data representations (IEEE 1516.2 table 24) and the simple
//! types built directly on them.

mod boolean;
mod fixed;
mod opaque;
mod strings;

pub use boolean::HlaBoolean;
pub use fixed::{
    HlaAsciiChar, HlaByte, HlaFloat32BE, HlaFloat32LE, HlaFloat64BE, HlaFloat64LE,
    HlaInteger16BE, HlaInteger16LE, HlaInteger32BE, HlaInteger32LE, HlaInteger64BE,
    HlaInteger64LE, HlaOctet, HlaOctetPairBE, HlaOctetPairLE, HlaUnicodeChar,
};
pub use opaque::HlaOpaqueData;
pub use strings::{HlaAsciiString, HlaUnicodeString};
