mod registry;
mod transform;
