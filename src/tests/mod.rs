mod api_site_router;
mod unit_config;
