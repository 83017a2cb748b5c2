//! Unit tests for the TIFF codec

mod decoder_tests;
