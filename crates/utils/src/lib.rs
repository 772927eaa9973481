// Copyright 2024 Ulvetanna Inc.

pub mod formatting;
pub mod tracing;
