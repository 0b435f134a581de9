use super::Serializer;

use forcedfields_core::Backend;

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer::for_backend(Backend::Sqlite)
    }

    pub fn postgresql() -> Serializer {
        Serializer::for_backend(Backend::Postgresql)
    }

    pub fn mysql() -> Serializer {
        Serializer::for_backend(Backend::Mysql)
    }

    pub fn for_backend(backend: Backend) -> Serializer {
        Serializer { backend }
    }
}
