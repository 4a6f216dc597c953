mod attribute_collection_start;
mod attribute_collection_submit;
mod basic_auth;
mod helpers;
mod signup_before_create;
