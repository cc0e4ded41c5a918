/*
 * This module provides config acquisition for the application.
 * It doesn't care what the configs say, only where they come from.
 */

pub mod files;
