// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Scenario and property-based tests for the Boyer-Moore Pattern Matcher.

mod scenario_tests;
