mod google_web_translator_test;
mod in_memory_job_registry_test;
mod request_id_test;
mod tracing_config_test;
mod translator_factory_test;
