pub mod error;
pub mod stack;
pub mod deck;
pub mod demo;
pub mod fallible;


///////////////////////////////////////////////////////////////////////////////
//// Stack Tests
///////////////////////////////////////////////////////////////////////////////



///////////////////////////////////////////////////////////////////////////////
//// Concurrent Stack Tests
///////////////////////////////////////////////////////////////////////////////
