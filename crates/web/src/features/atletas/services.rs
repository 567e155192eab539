use std::collections::HashMap;

use sqlx::PgPool;
use storage::{
    dto::{
        atleta::{AtletaCreate, AtletaDetail, AtletaFilter, AtletaOut},
        common::{LimitOffsetPage, LimitOffsetParams},
    },
    error::{Result, StorageError},
    models::Atleta,
    repository::{
        NameLookup, atleta::AtletaRepository, categoria::CategoriaRepository,
        centro_treinamento::CentroTreinamentoRepository,
    },
};

use crate::error::{WebError, WebResult};

const ATLETA_NOT_FOUND: &str = "Atleta não encontrado";

/// Register an athlete; a cpf that is already registered is a conflict
pub async fn create_atleta(pool: &PgPool, request: &AtletaCreate) -> WebResult<Atleta> {
    let repo = AtletaRepository::new(pool);

    repo.create(request).await.map_err(|e| {
        if e.is_unique_violation() {
            tracing::warn!(cpf = %request.cpf, "Duplicate athlete cpf");
            WebError::Conflict(format!(
                "Já existe um atleta cadastrado com o cpf: {}",
                request.cpf
            ))
        } else if e.is_foreign_key_violation() {
            WebError::BadRequest(unknown_reference_message(&e, request))
        } else {
            e.into()
        }
    })
}

fn unknown_reference_message(error: &StorageError, request: &AtletaCreate) -> String {
    match error.constraint() {
        Some("fk_atleta_centro_treinamento") => format!(
            "Centro de treinamento não encontrado: {}",
            request.centro_treinamento_id.unwrap_or_default()
        ),
        _ => format!(
            "Categoria não encontrada: {}",
            request.categoria_id.unwrap_or_default()
        ),
    }
}

/// Filtered page of athletes, relations shown by name
pub async fn list_atletas(
    pool: &PgPool,
    filter: &AtletaFilter,
    page: LimitOffsetParams,
) -> WebResult<LimitOffsetPage<AtletaOut>> {
    let repo = AtletaRepository::new(pool);
    let (atletas, total) = repo.list(filter, &page).await?;

    let items = project_list(
        &CategoriaRepository::new(pool),
        &CentroTreinamentoRepository::new(pool),
        atletas,
    )
    .await?;

    Ok(LimitOffsetPage::new(items, page, total))
}

/// Full athlete record, relations shown by name
pub async fn get_atleta(pool: &PgPool, id: i32) -> WebResult<AtletaDetail> {
    let repo = AtletaRepository::new(pool);

    let atleta = repo.find_by_id(id).await.map_err(|e| match e {
        StorageError::NotFound => WebError::NotFound(ATLETA_NOT_FOUND.to_string()),
        e => e.into(),
    })?;

    let detail = project_detail(
        &CategoriaRepository::new(pool),
        &CentroTreinamentoRepository::new(pool),
        atleta,
    )
    .await?;

    Ok(detail)
}

async fn project_list<C, T>(
    categorias: &C,
    centros: &T,
    atletas: Vec<Atleta>,
) -> Result<Vec<AtletaOut>>
where
    C: NameLookup,
    T: NameLookup,
{
    let categoria_names = resolve(categorias, atletas.iter().map(|a| a.categoria_id)).await?;
    let centro_names = resolve(centros, atletas.iter().map(|a| a.centro_treinamento_id)).await?;

    let items = atletas
        .into_iter()
        .map(|atleta| AtletaOut {
            nome: atleta.nome,
            centro_treinamento: name_for(&centro_names, atleta.centro_treinamento_id),
            categoria: name_for(&categoria_names, atleta.categoria_id),
        })
        .collect();

    Ok(items)
}

async fn project_detail<C, T>(
    categorias: &C,
    centros: &T,
    atleta: Atleta,
) -> Result<AtletaDetail>
where
    C: NameLookup,
    T: NameLookup,
{
    let categoria = match atleta.categoria_id {
        Some(id) => categorias.name_of(id).await?,
        None => None,
    };
    let centro_treinamento = match atleta.centro_treinamento_id {
        Some(id) => centros.name_of(id).await?,
        None => None,
    };

    Ok(AtletaDetail {
        id: atleta.id,
        nome: atleta.nome,
        cpf: atleta.cpf,
        categoria,
        centro_treinamento,
    })
}

/// One lookup for all distinct ids on the page
async fn resolve<L: NameLookup>(
    lookup: &L,
    ids: impl Iterator<Item = Option<i32>>,
) -> Result<HashMap<i32, String>> {
    let mut ids: Vec<i32> = ids.flatten().collect();
    ids.sort_unstable();
    ids.dedup();

    lookup.names_by_ids(&ids).await
}

fn name_for(names: &HashMap<i32, String>, id: Option<i32>) -> Option<String> {
    id.and_then(|id| names.get(&id).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeLookup {
        names: HashMap<i32, String>,
        calls: Mutex<Vec<Vec<i32>>>,
    }

    impl FakeLookup {
        fn new(names: &[(i32, &str)]) -> Self {
            Self {
                names: names.iter().map(|(id, n)| (*id, n.to_string())).collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl NameLookup for FakeLookup {
        async fn names_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, String>> {
            self.calls.lock().unwrap().push(ids.to_vec());
            Ok(ids
                .iter()
                .filter_map(|id| self.names.get(id).map(|n| (*id, n.clone())))
                .collect())
        }
    }

    fn atleta(id: i32, categoria_id: Option<i32>, centro_id: Option<i32>) -> Atleta {
        Atleta {
            id,
            nome: format!("Atleta {id}"),
            cpf: format!("{id:011}"),
            categoria_id,
            centro_treinamento_id: centro_id,
        }
    }

    #[tokio::test]
    async fn test_project_list_resolves_names_or_null() {
        let categorias = FakeLookup::new(&[(1, "Scale"), (2, "RX")]);
        let centros = FakeLookup::new(&[(7, "CT King")]);

        let items = project_list(
            &categorias,
            &centros,
            vec![
                atleta(1, Some(2), Some(7)),
                atleta(2, None, None),
                atleta(3, Some(2), None),
            ],
        )
        .await
        .unwrap();

        assert_eq!(
            items,
            vec![
                AtletaOut {
                    nome: "Atleta 1".to_string(),
                    centro_treinamento: Some("CT King".to_string()),
                    categoria: Some("RX".to_string()),
                },
                AtletaOut {
                    nome: "Atleta 2".to_string(),
                    centro_treinamento: None,
                    categoria: None,
                },
                AtletaOut {
                    nome: "Atleta 3".to_string(),
                    centro_treinamento: None,
                    categoria: Some("RX".to_string()),
                },
            ]
        );

        // one batched lookup per relation, ids deduplicated
        assert_eq!(*categorias.calls.lock().unwrap(), vec![vec![2]]);
        assert_eq!(*centros.calls.lock().unwrap(), vec![vec![7]]);
    }

    #[tokio::test]
    async fn test_project_detail() {
        let categorias = FakeLookup::new(&[(1, "Scale")]);
        let centros = FakeLookup::new(&[]);

        let detail = project_detail(&categorias, &centros, atleta(5, Some(1), None))
            .await
            .unwrap();

        assert_eq!(
            detail,
            AtletaDetail {
                id: 5,
                nome: "Atleta 5".to_string(),
                cpf: "00000000005".to_string(),
                categoria: Some("Scale".to_string()),
                centro_treinamento: None,
            }
        );
        assert!(centros.calls.lock().unwrap().is_empty());
    }
}
