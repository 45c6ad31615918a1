//! The built-in package list.
//!
//! Used whenever no config file supplies `packages`.

use super::requirement::{parse_requirements, PackageRequirement};

/// Packages checked by default, in report order.
pub const DEFAULT_PACKAGES: &[&str] = &[
    "langgraph",
    "langgraph-checkpoint",
    "langgraph-cli[inmem]",
    "langgraph-supervisor",
    "langmem",
    "langchain",
    "langchain-core",
    "langchain-openai",
    "langchain-community",
    "langchain-postgres",
    "openai",
    "fastapi[standard]",
    "uvicorn[standard]",
    "pydantic",
    "pydantic-settings",
    "requests",
    "httpx",
    "python-dotenv",
    "psycopg-binary",
    "psycopg2-binary",
    "pytest",
    "pytest-asyncio",
    "tenacity",
    "loguru",
    "python-docx",
    "nbformat",
];

/// The built-in list as requirements.
pub fn default_requirements() -> Vec<PackageRequirement> {
    parse_requirements(DEFAULT_PACKAGES.iter().copied())
}
