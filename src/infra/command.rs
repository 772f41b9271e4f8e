use anyhow::{Result, anyhow, bail};
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Splits a command line into a program and its arguments using shell-style
/// word splitting. Consecutive whitespace collapses, so empty tokens in a
/// space-joined argument string disappear exactly as they would under a
/// shell.
///
/// # Arguments
/// * `command` - The command line to split.
///
/// # Returns
/// The program name and its argument list, or an error if the command line
/// cannot be parsed or is empty.
///
/// 使用 shell 风格的分词将命令行拆分为程序及其参数。
/// 连续的空白会合并，因此以空格连接的参数串中的空 token 会消失，
/// 与在 shell 下的行为完全一致。
///
/// # Arguments
/// * `command` - 要拆分的命令行。
///
/// # Returns
/// 程序名及其参数列表；如果命令行无法解析或为空，则返回错误。
pub fn split_command(command: &str) -> Result<(String, Vec<String>)> {
    let mut parts =
        shlex::split(command).ok_or_else(|| anyhow!("Failed to parse command: {}", command))?;
    if parts.is_empty() {
        bail!("Empty command after parsing: {:?}", command);
    }
    let program = parts.remove(0);
    Ok((program, parts))
}

/// Spawns a command with inherited stdio and blocks until it exits. Used for
/// the build and diff steps, whose output goes straight to the console.
///
/// 以继承的 stdio 派生命令并阻塞直至其退出。
/// 用于构建与对比步骤，它们的输出直接进入控制台。
pub async fn run_to_completion(mut cmd: Command) -> std::io::Result<ExitStatus> {
    cmd.kill_on_drop(true).status().await
}

/// A scoped acquisition of a spawned child process together with its merged
/// stdout/stderr line stream. Both streams are read line by line on
/// background tasks and funneled into a single channel, so the consumer sees
/// one line-oriented stream in arrival order. The child is killed on drop,
/// so the OS handle is released on every exit path.
///
/// 对已派生子进程及其合并的 stdout/stderr 行流的受限获取。
/// 两个流都在后台任务中逐行读取并汇入单一通道，
/// 因此消费者看到的是按到达顺序排列的单一行流。
/// 子进程在 drop 时被杀死，确保在所有退出路径上释放 OS 句柄。
pub struct ScopedProcess {
    child: Child,
    lines: mpsc::UnboundedReceiver<String>,
    readers: [JoinHandle<()>; 2],
}

impl ScopedProcess {
    /// Spawns the command with piped stdout and stderr and starts the two
    /// reader tasks feeding the merged line stream.
    ///
    /// 以管道方式派生命令的 stdout 和 stderr，
    /// 并启动两个读取任务来供给合并的行流。
    pub fn spawn(mut cmd: Command) -> std::io::Result<Self> {
        let mut child = cmd
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("Failed to capture stdout"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| std::io::Error::other("Failed to capture stderr"))?;

        let (tx, rx) = mpsc::unbounded_channel();
        let readers = [forward_lines(stdout, tx.clone()), forward_lines(stderr, tx)];

        Ok(Self {
            child,
            lines: rx,
            readers,
        })
    }

    /// Receives the next merged output line, or `None` once both streams have
    /// reached end of file. Lines arrive in the order the reader tasks
    /// observe them.
    ///
    /// 接收下一条合并输出行；当两个流都到达文件末尾时返回 `None`。
    /// 行按读取任务观察到的顺序到达。
    pub async fn next_line(&mut self) -> Option<String> {
        self.lines.recv().await
    }

    /// Waits for the process to exit and for both reader tasks to finish,
    /// ensuring the streams are fully drained before the status is returned.
    ///
    /// 等待进程退出以及两个读取任务完成，
    /// 确保在返回状态之前流已被完全读尽。
    pub async fn wait(mut self) -> std::io::Result<ExitStatus> {
        let status = self.child.wait().await;
        for reader in self.readers {
            if let Err(e) = reader.await {
                eprintln!("Failed to join output reader task: {}", e);
            }
        }
        status
    }
}

/// Reads a stream line by line and forwards each line into the merged
/// channel. Stops on end of file or once the receiver is gone.
///
/// 逐行读取流并将每一行转发到合并通道。
/// 在文件末尾或接收端消失后停止。
fn forward_lines(
    stream: impl AsyncRead + Unpin + Send + 'static,
    tx: mpsc::UnboundedSender<String>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(stream).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).is_err() {
                break;
            }
        }
    })
}
