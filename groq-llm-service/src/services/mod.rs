pub mod groq_service;
