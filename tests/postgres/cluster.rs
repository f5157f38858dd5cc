//! Cluster lifecycle helpers for `PostgreSQL` integration tests.
//!
//! One embedded cluster is started per test binary and shared by every
//! test. Each test works in its own database cloned from a migrated
//! template.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use diesel::prelude::*;
use pg_embedded_setup_unpriv::{
    ExecutionPrivileges, bootstrap_for_tests, detect_execution_privileges,
};
use postgresql_embedded::{PostgreSQL, Settings, Status};
use rstest::fixture;
use std::env;
use std::net::TcpListener;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tokio::runtime::Runtime;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

static SHARED_CLUSTER: OnceLock<Option<ManagedCluster>> = OnceLock::new();
static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Shared `PostgreSQL` cluster handle for integration tests.
pub type PostgresCluster = &'static ManagedCluster;

/// Embedded `PostgreSQL` cluster running inside the test process.
pub struct ManagedCluster {
    settings: Settings,
    _postgres: PostgreSQL,
    _runtime: Runtime,
}

impl ManagedCluster {
    fn start() -> Result<Self, BoxError> {
        if matches!(detect_execution_privileges(), ExecutionPrivileges::Root) {
            return Err("embedded PostgreSQL cannot run as root".into());
        }

        let bootstrap = {
            let _port = ScopedEnv::set(&[("PG_PORT".to_owned(), free_port()?)]);
            bootstrap_for_tests().map_err(|err| Box::new(err) as BoxError)?
        };
        let env_vars = bootstrap.environment.to_env();
        let mut settings = bootstrap.settings;
        sync_password_from_file(&mut settings)?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let mut postgres = PostgreSQL::new(settings);
        {
            let _env = ScopedEnv::set_optional(&env_vars);
            runtime.block_on(async {
                postgres.setup().await?;
                if !matches!(postgres.status(), Status::Started) {
                    postgres.start().await?;
                }
                Ok::<(), postgresql_embedded::Error>(())
            })?;
        }

        let mut started = postgres.settings().clone();
        sync_port_from_pid(&mut started)?;
        Ok(Self {
            settings: started,
            _postgres: postgres,
            _runtime: runtime,
        })
    }

    /// Returns the connection URL for `database` on this cluster.
    #[must_use]
    pub fn database_url(&self, database: &str) -> String {
        self.settings.url(database)
    }

    /// Creates `template` and runs `migrate` against it unless it already
    /// exists. A failed migration drops the half-built template.
    pub fn ensure_template_exists<F>(&self, template: &str, migrate: F) -> Result<(), BoxError>
    where
        F: FnOnce(&str) -> Result<(), BoxError>,
    {
        let _guard = TEMPLATE_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if self.database_exists(template)? {
            return Ok(());
        }

        self.execute_admin_sql(&format!("CREATE DATABASE {}", quote_identifier(template)))?;
        if let Err(err) = migrate(template) {
            self.drop_database(template)?;
            return Err(err);
        }
        Ok(())
    }

    /// Clones `template` into a fresh database that is dropped with the
    /// returned handle.
    pub fn temporary_database_from_template(
        &'static self,
        name: &str,
        template: &str,
    ) -> Result<TemporaryDatabase, BoxError> {
        self.execute_admin_sql(&format!(
            "CREATE DATABASE {} TEMPLATE {}",
            quote_identifier(name),
            quote_identifier(template),
        ))?;
        Ok(TemporaryDatabase {
            cluster: self,
            name: name.to_owned(),
        })
    }

    fn drop_database(&self, name: &str) -> Result<(), BoxError> {
        self.execute_admin_sql(&format!(
            "DROP DATABASE IF EXISTS {} WITH (FORCE)",
            quote_identifier(name)
        ))
    }

    fn admin_connection(&self) -> Result<PgConnection, BoxError> {
        PgConnection::establish(&self.database_url("postgres"))
            .map_err(|err| Box::new(err) as BoxError)
    }

    fn execute_admin_sql(&self, sql: &str) -> Result<(), BoxError> {
        let mut conn = self.admin_connection()?;
        diesel::sql_query(sql).execute(&mut conn)?;
        Ok(())
    }

    fn database_exists(&self, name: &str) -> Result<bool, BoxError> {
        #[derive(diesel::QueryableByName)]
        struct ExistsRow {
            #[diesel(sql_type = diesel::sql_types::Bool)]
            exists: bool,
        }

        let mut conn = self.admin_connection()?;
        let row = diesel::sql_query(
            "SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1) AS exists",
        )
        .bind::<diesel::sql_types::Text, _>(name)
        .get_result::<ExistsRow>(&mut conn)?;
        Ok(row.exists)
    }
}

/// Database owned by a single test.
pub struct TemporaryDatabase {
    cluster: PostgresCluster,
    name: String,
}

impl TemporaryDatabase {
    /// Returns the connection URL for this database.
    #[must_use]
    pub fn url(&self) -> String {
        self.cluster.database_url(&self.name)
    }
}

impl Drop for TemporaryDatabase {
    fn drop(&mut self) {
        drop(self.cluster.drop_database(&self.name));
    }
}

/// Provides the shared cluster, or `None` when embedded `PostgreSQL` cannot
/// start in this environment.
#[fixture]
pub fn postgres_cluster() -> Option<PostgresCluster> {
    SHARED_CLUSTER.get_or_init(start_or_report).as_ref()
}

#[expect(
    clippy::print_stderr,
    reason = "explains once why the live database tests are skipped"
)]
fn start_or_report() -> Option<ManagedCluster> {
    match ManagedCluster::start() {
        Ok(cluster) => Some(cluster),
        Err(err) => {
            eprintln!("skipping PostgreSQL tests: {err}");
            None
        }
    }
}

/// Environment overrides that are reverted on drop.
struct ScopedEnv {
    previous: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    fn set(changes: &[(String, String)]) -> Self {
        let optional: Vec<_> = changes
            .iter()
            .map(|(key, value)| (key.clone(), Some(value.clone())))
            .collect();
        Self::set_optional(&optional)
    }

    fn set_optional(changes: &[(String, Option<String>)]) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let previous = changes
            .iter()
            .map(|(key, value)| {
                let old = env::var(key).ok();
                apply_env(key, value.as_deref());
                (key.clone(), old)
            })
            .collect();
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            apply_env(&key, value.as_deref());
        }
    }
}

fn apply_env(key: &str, value: Option<&str>) {
    unsafe {
        // SAFETY: ENV_LOCK serialises environment mutation in this test binary.
        match value {
            Some(new_value) => env::set_var(key, new_value),
            None => env::remove_var(key),
        }
    }
}

fn free_port() -> Result<String, BoxError> {
    if let Ok(port) = env::var("PG_PORT") {
        return Ok(port);
    }
    let listener = TcpListener::bind(("127.0.0.1", 0))?;
    Ok(listener.local_addr()?.port().to_string())
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn open_ambient_dir(path: &Utf8Path) -> Result<Dir, BoxError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|err| Box::new(err) as BoxError)
}

fn sync_password_from_file(settings: &mut Settings) -> Result<(), BoxError> {
    let password_path = settings.password_file.to_string_lossy().into_owned();
    let password_path = Utf8Path::new(&password_path);
    let Some(file_name) = password_path.file_name() else {
        return Ok(());
    };
    let dir = open_ambient_dir(password_path.parent().unwrap_or_else(|| Utf8Path::new(".")))?;
    match dir.read_to_string(file_name) {
        Ok(contents) => {
            let password = contents.trim_end();
            if !password.is_empty() {
                password.clone_into(&mut settings.password);
            }
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(Box::new(err) as BoxError),
    }
    Ok(())
}

fn sync_port_from_pid(settings: &mut Settings) -> Result<(), BoxError> {
    let data_dir = settings.data_dir.to_string_lossy().into_owned();
    let dir = open_ambient_dir(Utf8Path::new(&data_dir))?;
    let contents = match dir.read_to_string("postmaster.pid") {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(Box::new(err) as BoxError),
    };

    if let Some(port) = contents
        .lines()
        .nth(3)
        .and_then(|line| line.trim().parse::<u16>().ok())
    {
        settings.port = port;
    }
    Ok(())
}
