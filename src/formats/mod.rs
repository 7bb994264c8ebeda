//! Format support for the two ends of the pipeline.
//!
//! `mela` is parse-only (the input side), `paprika` is serialize-only (the
//! output side). There is no round trip: conversion runs one way.

pub mod mela;
pub mod paprika;
