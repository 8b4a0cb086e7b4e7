/// Трейт для корня агрегата: метаданные для построения REST-путей
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: super::AggregateId;

    /// REST collection, e.g. `products` in `GET /products`
    fn collection_name() -> &'static str;

    /// Path of the whole collection: `/products`
    fn collection_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Path of one element: `/orders/7`
    fn element_path(id: Self::Id) -> String {
        use super::AggregateId;
        format!("/{}/{}", Self::collection_name(), id.as_string())
    }
}
